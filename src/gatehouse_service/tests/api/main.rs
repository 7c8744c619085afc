mod health;
mod helpers;
mod login;
