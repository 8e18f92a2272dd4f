//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod counter_repo;
pub mod problem_repo;

pub use counter_repo::CounterRepository;
pub use problem_repo::ProblemRepository;
