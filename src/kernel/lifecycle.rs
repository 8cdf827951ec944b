use super::ConfigError;

/// Constructor validation lifecycle shared by design kernels.
///
/// A kernel that exists was constructed from a config that passed every
/// range/finiteness check, so its run path only reports conditions that
/// depend on parameter combinations (such as the band-shelf no-solution
/// case), never raw out-of-range input.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}
