use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::{actor_info, movie_actor_relation, movie_info},
    flash::{Flash, Level},
    models::{ActorSummary, ActorWorks, MovieCredits, MovieSummary},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(
    owner: &str,
    movies: &[movie_info::Model],
    actors: &[actor_info::Model],
    relations: &[movie_actor_relation::Model],
) -> String {
    page(
        owner,
        "Catalog",
        html! {
            section {
                h2 class="text-xl font-semibold text-gray-900" { (movies.len()) " movies" }
                (movie_table(movies))
            }
            section class="mt-10" {
                h2 class="text-xl font-semibold text-gray-900" { (actors.len()) " actors" }
                (actor_table(actors))
            }
            section class="mt-10" {
                h2 class="text-xl font-semibold text-gray-900" { (relations.len()) " relations" }
                table class="mt-4 w-full text-sm text-left" {
                    thead { tr class="text-gray-500" { th { "ID" } th { "Movie" } th { "Actor" } th { "Type" } } }
                    tbody {
                        @for rel in relations {
                            tr class="border-t" {
                                td { (rel.id) }
                                td {
                                    @if let Some(movie_id) = &rel.movie_id {
                                        a class="text-blue-600 hover:text-blue-800" href=(format!("/movie_detail/{movie_id}")) { (movie_id) }
                                    }
                                }
                                td {
                                    @if let Some(actor_id) = &rel.actor_id {
                                        a class="text-blue-600 hover:text-blue-800" href=(format!("/actor_detail/{actor_id}")) { (actor_id) }
                                    }
                                }
                                td { (opt(&rel.relation_type)) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn movies_page(owner: &str, movies: &[MovieSummary]) -> String {
    page(
        owner,
        "Movies",
        html! {
            h2 class="text-xl font-semibold text-gray-900" { (movies.len()) " movies" }
            div class="mt-6 space-y-4" {
                @for summary in movies {
                    div class="bg-white shadow rounded-lg p-6" {
                        h3 class="text-lg font-semibold" {
                            a class="text-blue-600 hover:text-blue-800" href=(format!("/movie_detail/{}", summary.movie.movie_id)) {
                                (opt(&summary.movie.movie_name))
                            }
                            @if let Some(year) = summary.movie.year {
                                span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                            }
                        }
                        p class="mt-1 text-sm text-gray-600" {
                            "Starring: " (joined(&summary.actor_names))
                        }
                        p class="text-sm text-gray-600" {
                            "Directed by: " (joined(&summary.director_names))
                        }
                    }
                }
            }
        },
    )
}

pub fn actors_page(owner: &str, actors: &[ActorSummary], flash: Option<&Flash>) -> String {
    page(
        owner,
        "Actors",
        html! {
            @if let Some(flash) = flash {
                @let color = match flash.level {
                    Level::Success => "bg-green-50 text-green-800",
                    Level::Error => "bg-red-50 text-red-800",
                };
                div class=(format!("flash rounded-md p-4 {color}")) { (flash.message) }
            }

            form class="mt-6 bg-white shadow rounded-lg p-6 grid gap-4 md:grid-cols-4" method="post" action="/actor" enctype="multipart/form-data" {
                input class="rounded-md border border-gray-300 px-3 py-2" name="name" placeholder="Name" autocomplete="off";
                input class="rounded-md border border-gray-300 px-3 py-2" name="gender" placeholder="Gender" autocomplete="off";
                input class="rounded-md border border-gray-300 px-3 py-2" name="country" placeholder="Country" autocomplete="off";
                input class="text-sm" type="file" name="file" accept="image/jpeg";
                button class="md:col-span-4 rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add" }
            }

            h2 class="mt-10 text-xl font-semibold text-gray-900" { (actors.len()) " actors" }
            table class="mt-4 w-full text-sm text-left" {
                thead { tr class="text-gray-500" { th { "Name" } th { "Gender" } th { "Country" } th { "Acting" } th { "Directing" } } }
                tbody {
                    @for summary in actors {
                        tr class="border-t" {
                            td {
                                a class="text-blue-600 hover:text-blue-800" href=(format!("/actor_detail/{}", summary.actor.actor_id)) {
                                    (opt(&summary.actor.actor_name))
                                }
                            }
                            td { (opt(&summary.actor.gender)) }
                            td { (opt(&summary.actor.country)) }
                            td { (summary.acting_count) }
                            td { (summary.directing_count) }
                        }
                    }
                }
            }
        },
    )
}

pub fn actor_detail_page(
    owner: &str,
    actor: &actor_info::Model,
    works: &ActorWorks,
    image_url: Option<&str>,
) -> String {
    page(
        owner,
        actor.actor_name.as_deref().unwrap_or("Actor"),
        html! {
            div class="bg-white shadow rounded-lg p-6 flex gap-6" {
                @if let Some(url) = image_url {
                    img class="h-40 w-32 object-cover rounded" src=(url) alt=(opt(&actor.actor_name));
                }
                div {
                    h2 class="text-2xl font-bold text-gray-900" { (opt(&actor.actor_name)) }
                    p class="mt-2 text-gray-600" { (opt(&actor.gender)) " · " (opt(&actor.country)) }
                }
            }
            section id="act_works" class="mt-8" {
                h3 class="text-lg font-semibold text-gray-900" { "Acting" }
                (movie_list(&works.act_works))
            }
            section id="direct_works" class="mt-8" {
                h3 class="text-lg font-semibold text-gray-900" { "Directing" }
                (movie_list(&works.direct_works))
            }
        },
    )
}

pub fn movie_detail_page(owner: &str, movie: &movie_info::Model, credits: &MovieCredits) -> String {
    page(
        owner,
        movie.movie_name.as_deref().unwrap_or("Movie"),
        html! {
            div class="bg-white shadow rounded-lg p-6" {
                h2 class="text-2xl font-bold text-gray-900" { (opt(&movie.movie_name)) }
                dl class="mt-4 grid grid-cols-2 gap-2 text-sm text-gray-700" {
                    dt class="text-gray-500" { "Released" } dd { (opt(&movie.release_date)) }
                    dt class="text-gray-500" { "Country" } dd { (opt(&movie.country)) }
                    dt class="text-gray-500" { "Genre" } dd { (opt(&movie.movie_type)) }
                    dt class="text-gray-500" { "Box office" } dd {
                        @if let Some(gross) = movie.box_office { (format!("{gross:.2}")) } @else { "—" }
                    }
                }
            }
            section id="actors" class="mt-8" {
                h3 class="text-lg font-semibold text-gray-900" { "Cast" }
                (actor_list(&credits.actors))
            }
            section id="directors" class="mt-8" {
                h3 class="text-lg font-semibold text-gray-900" { "Directors" }
                (actor_list(&credits.directors))
            }
        },
    )
}

pub fn not_found_page() -> String {
    message_page("Page Not Found", "Nothing lives here.")
}

pub fn error_page(message: String) -> String {
    message_page("Error", &message)
}

fn message_page(title: &str, message: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body {
                div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                    div class="max-w-xl w-full px-6" {
                        div class="bg-white shadow rounded-lg p-8" {
                            h1 class="text-2xl font-bold text-gray-900" { (title) }
                            p class="mt-4 text-gray-700" { (message) }
                            a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Go Back" }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

fn page(owner: &str, title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · " (owner) "'s Movie List" }
                script src=(TAILWIND_CDN) {}
            }
            body class="bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-10" {
                    header class="flex items-center justify-between" {
                        h1 class="text-3xl font-bold text-gray-900" { (owner) "'s Movie List" }
                        nav class="space-x-4 text-sm" {
                            a class="text-blue-600 hover:text-blue-800" href="/" { "Home" }
                            a class="text-blue-600 hover:text-blue-800" href="/movie" { "Movies" }
                            a class="text-blue-600 hover:text-blue-800" href="/actor" { "Actors" }
                        }
                    }
                    main class="mt-8" { (body) }
                }
            }
        }
    }
    .into_string()
}

fn movie_table(movies: &[movie_info::Model]) -> Markup {
    html! {
        table class="mt-4 w-full text-sm text-left" {
            thead { tr class="text-gray-500" { th { "Title" } th { "Released" } th { "Country" } th { "Genre" } th { "Box office" } } }
            tbody {
                @for movie in movies {
                    tr class="border-t" {
                        td {
                            a class="text-blue-600 hover:text-blue-800" href=(format!("/movie_detail/{}", movie.movie_id)) { (opt(&movie.movie_name)) }
                        }
                        td { (opt(&movie.release_date)) }
                        td { (opt(&movie.country)) }
                        td { (opt(&movie.movie_type)) }
                        td { @if let Some(gross) = movie.box_office { (format!("{gross:.2}")) } }
                    }
                }
            }
        }
    }
}

fn actor_table(actors: &[actor_info::Model]) -> Markup {
    html! {
        table class="mt-4 w-full text-sm text-left" {
            thead { tr class="text-gray-500" { th { "Name" } th { "Gender" } th { "Country" } } }
            tbody {
                @for actor in actors {
                    tr class="border-t" {
                        td {
                            a class="text-blue-600 hover:text-blue-800" href=(format!("/actor_detail/{}", actor.actor_id)) { (opt(&actor.actor_name)) }
                        }
                        td { (opt(&actor.gender)) }
                        td { (opt(&actor.country)) }
                    }
                }
            }
        }
    }
}

fn movie_list(movies: &[movie_info::Model]) -> Markup {
    html! {
        @if movies.is_empty() {
            p class="mt-2 text-sm text-gray-500" { "—" }
        } @else {
            ul class="mt-2 space-y-1" {
                @for movie in movies {
                    li class="text-sm text-gray-700" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/movie_detail/{}", movie.movie_id)) { (opt(&movie.movie_name)) }
                        @if let Some(year) = movie.year {
                            span class="text-gray-500" { " · " (year) }
                        }
                    }
                }
            }
        }
    }
}

fn actor_list(actors: &[actor_info::Model]) -> Markup {
    html! {
        @if actors.is_empty() {
            p class="mt-2 text-sm text-gray-500" { "—" }
        } @else {
            ul class="mt-2 space-y-1" {
                @for actor in actors {
                    li class="text-sm text-gray-700" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/actor_detail/{}", actor.actor_id)) { (opt(&actor.actor_name)) }
                    }
                }
            }
        }
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn joined(names: &[String]) -> String {
    if names.is_empty() { "—".to_string() } else { names.join(", ") }
}
