mod support;

mod check_availability_tests;
