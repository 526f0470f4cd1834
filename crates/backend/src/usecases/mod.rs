pub mod u101_probe_board;
