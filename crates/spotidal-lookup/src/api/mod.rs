pub mod lucida;
