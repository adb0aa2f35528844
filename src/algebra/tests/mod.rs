mod solve;
mod vector;
