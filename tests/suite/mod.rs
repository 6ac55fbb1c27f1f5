mod binary;
mod config;
mod known_answers;
