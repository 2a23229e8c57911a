pub mod actor_info;
pub mod movie_actor_relation;
pub mod movie_info;
