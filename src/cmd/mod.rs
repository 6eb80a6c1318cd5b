pub mod iso;
pub mod keymap;
pub mod run;
