pub mod http_availability_authority_facade_impl;
