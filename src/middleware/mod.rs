pub mod function_key;
