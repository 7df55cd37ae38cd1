pub mod named_molecules;
