pub mod autoplay;
pub mod init_config;
pub mod run;
pub mod slides;
