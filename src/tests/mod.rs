mod router_tests;
mod shoe_card_tests;
mod utils;
