mod common;
mod persona;
