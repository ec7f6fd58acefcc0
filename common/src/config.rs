/// How many of a hostname's resolved addresses take part in classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepresentativePolicy {
    /// Only the first resolved address is checked.
    ///
    /// Assumes every address of a hostname shares the same network owner.
    /// That does not hold for CDN-fronted hosts, whose addresses can belong
    /// to different organizations.
    #[default]
    FirstAddress,
    /// Every resolved address is checked in order; the first one inside
    /// the scope becomes the representative.
    AnyAddress,
}

pub struct Config {
    /// 0 prints everything, 1 drops decoration, 2 only prints warnings.
    pub quiet: u8,
    pub no_banner: bool,
    pub policy: RepresentativePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            policy: RepresentativePolicy::FirstAddress,
        }
    }
}
