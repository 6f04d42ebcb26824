pub mod collaborator;
