mod helpers;

mod cli_test;
mod input_test;
mod payload_test;
