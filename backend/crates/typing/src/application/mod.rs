//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Every use case except `OpenSession` takes the session handle returned
//! at login.

pub mod check_session;
pub mod config;
pub mod engine;
pub mod restart_test;
pub mod session;
pub mod submit_attempt;

pub use check_session::{CheckSessionUseCase, SessionSnapshot};
pub use restart_test::RestartTestUseCase;
pub use session::{CloseSessionUseCase, OpenSessionOutput, OpenSessionUseCase};
pub use start_test::{StartTestOutput, StartTestUseCase};
pub use submit_attempt::{SubmitAttemptOutput, SubmitAttemptUseCase};
