pub mod agenda;
pub mod join;
pub mod login;
pub mod logout;
pub mod new;
pub mod register;
pub mod show;
pub mod whoami;
