mod error_tests;
mod location_tests;
mod parser_tests;
