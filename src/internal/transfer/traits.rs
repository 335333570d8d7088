pub mod transfer_hook;
