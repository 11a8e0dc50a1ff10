pub use wfg::HyperVolumeWfg;

mod wfg;
