mod fragment_tests;
mod page_tests;
