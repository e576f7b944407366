mod create;
mod delete;
mod helpers;
mod rank;
mod read;
