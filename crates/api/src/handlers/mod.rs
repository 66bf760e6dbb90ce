pub mod advice;
pub mod chat;
pub mod diagnostics;
pub mod feedback;
pub mod learning_path;
pub mod pages;
