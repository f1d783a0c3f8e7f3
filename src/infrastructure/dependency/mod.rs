//! Dependency check infrastructure module

mod which;

pub use which::WhichDependencyChecker;
