use std::fmt;

/// Width of every count field in harness input (`numObjects`, `numBytes`).
pub const COUNT_FIELD_LEN: usize = 4;

/// Version tag stamped on every synthesized bundle.
pub const KTEST_VERSION: u32 = 0;

/// One named byte payload inside a [`KTest`].
///
/// `num_bytes` is what the record claims; `bytes` is what it actually carries.
/// The two are allowed to disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KTestObject {
    pub name: Option<String>,
    pub num_bytes: u32,
    pub bytes: Option<Vec<u8>>,
}

impl KTestObject {
    /// Record used when the input ran out before its length field.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the record claims bytes it does not carry.
    pub fn is_claimed_but_missing(&self) -> bool {
        self.num_bytes > 0 && self.bytes.is_none()
    }
}

/// In-memory test case handed to the function under test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KTest {
    pub version: u32,
    pub num_args: u32,
    pub args: Vec<String>,
    pub sym_argvs: u32,
    pub sym_argv_len: u32,
    pub num_objects: u32,
    pub objects: Vec<KTestObject>,
}

impl KTest {
    /// Bundle with no arguments and symbolic argv disabled.
    pub fn with_objects(objects: Vec<KTestObject>) -> Self {
        Self {
            version: KTEST_VERSION,
            num_args: 0,
            args: Vec::new(),
            sym_argvs: 0,
            sym_argv_len: 0,
            num_objects: objects.len() as u32,
            objects,
        }
    }

    pub fn payload_bytes(&self) -> usize {
        self.objects
            .iter()
            .filter_map(|o| o.bytes.as_ref())
            .map(Vec::len)
            .sum()
    }
}

impl fmt::Display for KTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = self
            .objects
            .iter()
            .filter(|o| o.is_claimed_but_missing())
            .count();
        write!(
            f,
            "KTest v{} (objects: {}, payload: {}B, missing: {})",
            self.version,
            self.num_objects,
            self.payload_bytes(),
            missing
        )
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("insufficient input: wanted {wanted} bytes, {remaining} remaining")]
    Insufficient { wanted: usize, remaining: usize },
    #[error("allocation of {0} bytes failed")]
    AllocationFailed(usize),
}
