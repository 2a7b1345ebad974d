pub mod adoption_request;
