pub mod git;
pub mod link;
pub mod scanner;
pub mod version;
pub mod wake;
