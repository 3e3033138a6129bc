pub mod earclip;
