pub mod dot_art;
