pub mod accounts_data;
pub mod config_data;
pub mod keybindings_data;
pub mod storage;
