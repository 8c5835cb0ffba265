pub mod init;
pub mod setup;

pub use init::InitCommand;
pub use setup::SetupCommand;
