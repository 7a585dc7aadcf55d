mod admin_tests;
mod contact_tests;
mod public_tests;
