pub mod d100_simorgh_adoption;
