pub mod filetypes;
