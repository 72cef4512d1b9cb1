pub mod prediction_error_response;
