mod dispatch_tests;
mod idempotence_tests;
mod precedence_tests;
