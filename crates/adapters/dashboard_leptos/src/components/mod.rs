mod transaction_form;

pub use transaction_form::TransactionForm;
