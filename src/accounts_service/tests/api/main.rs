mod helpers;
mod login;
mod register;
mod user;
