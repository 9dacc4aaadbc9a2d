mod test_account;
mod test_error;
mod test_requests;
