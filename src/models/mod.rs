pub mod report;
pub mod run;
pub mod verification;

pub use report::*;
pub use run::*;
pub use verification::*;
