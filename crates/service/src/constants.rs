/// Ethereum slot duration in seconds
pub const SLOT_DURATION_SECONDS: u64 = 12;

/// Slots per epoch
pub const SLOTS_PER_EPOCH: u64 = 32;

/// Epochs a sync committee stays in office
pub const EPOCHS_PER_SYNC_COMMITTEE_PERIOD: u64 = 256;

/// Slots per sync committee period (8192)
pub const SLOTS_PER_SYNC_COMMITTEE_PERIOD: u64 = SLOTS_PER_EPOCH * EPOCHS_PER_SYNC_COMMITTEE_PERIOD;

/// Most sync committee members returned per request; real committees hold 512
pub const MAX_DISPLAYED_SYNC_COMMITTEE: usize = 32;

/// Lowercase fragments of `extraData` written by well-known MEV-Boost builders
pub const MEV_BUILDER_TAGS: &[&str] = &[
	"flashbots",
	"illuminate dmocratize dstribute",
	"builder0x69",
	"rsync-builder",
	"manifold",
	"eth-builder",
	"beaverbuild",
	"titanbuilder",
	"bloxroute",
	"buildai",
	"blocknative",
];

/// Blocks with more transactions than this are assumed to be builder-produced
pub const MEV_TRANSACTION_THRESHOLD: usize = 20;

pub const WEI_PER_GWEI: u64 = 1_000_000_000;

/// Reported instead of a computed reward of zero GWEI
pub const ZERO_REWARD_PLACEHOLDER_GWEI: u64 = 1_000;

/// Reported when the execution block cannot be fetched (0.01 ETH)
pub const UNAVAILABLE_REWARD_PLACEHOLDER_GWEI: u64 = 10_000_000;

/// Mainnet validator public keys used to build synthetic committees
pub const SYNTHETIC_VALIDATOR_PUBKEYS: [&str; 24] = [
	"0x8000091c2ae64ee414a54c1cc1fc67dec663408bc636cb86756e0200e41a75c8f86603f104f02c856983d2783116be13",
	"0x8000091c2ae64ee414a54c1cc1fc67dec663408bc636cb86756e0200e41a75c8f86603f104f02c856983d2783116be14",
	"0xa1d1ad0714035353258038e964ae9675dc0252ee24daffcb82688956ebf71d0de0fc5450436cfb148eb867acb2bdf44d",
	"0xb2ff4716ed345b05dd1dfc6a5a9fa70856d8c75dcc9e881dd2f766d5f891326f0d0b9024523b9c35cc13d9c0e689aea3",
	"0x8a896180ff9d8e98304e9b2e5c418202fa0e50a1157442a5b52fc10b464a6c114dfc31f463e4ea27c1c24112e3a14857",
	"0x8d61ee78745e8c855af1085184e9c5646418fcfc5f446e3e99d5db6b0cbe74f7c0792833c876044d53bd7886de12371c",
	"0xae241af60691fda1cf8ca44d49573c55818c53b6141800cca2d488b9a3fba71c0f869179fff50c084ae31d9bac2ba35c",
	"0x84274f8d9c1e25d6d2f6b62c256e427e9daa79dff932a658b334ce3a5775574b23b6532753b90b74e56a24b148caf5b7",
	"0x872c61b4a7f8510ec809e5b023f5fdda2105d024c470ddbbeca4bc74e8280af0d178d749853e8f6a841083ac1b4db98f",
	"0xb2965bf5de4731c8fef4f2d8886d4f9564c5d2d8eb957e5f624dd010e9c36f947c6c0ab78df06e67dd6cf290c53313e5",
	"0x8cffca6ab53ec85904d6a32f0b360c027926d4ae83c136b7fa979ebaba16da82c37bb4a335629741e1ffc8017f0c0d99",
	"0x8e98f02a14788cc9348d4c988ff98c2440282a230a57d0e57482c59a90f11df1ec93af597c9b6188a2ba7d82ac5d52a1",
	"0x8f5bab954b24a4e9b118a8a39b4c3663d6861b3316fd5a326a2a632a7de1438fe2dafe9d4d3429f04db5a1a5c1e89c4e",
	"0x90a766525a8141ad2869e3b3ae9a952f61e596235a548631e3354ff3881891c18fc9e7d1fc3fd65c3271693e781c215a",
	"0x909d0f2fa98422ce15369643b650aa1200a1200cc88ab416ca3f2ea9582b651f0a97bd10dfa8735402cf89a2498c9af5",
	"0x948339fff96a195de4bdc3e121abc427dae48f23966244b1363436a61e5d0c733e79feb9f900ea58a9886fc0ba862be6",
	"0x968bb4503245548dc8dc145cf111762e5e693ec964cef572e87e2939df581cf214f57ae3c49da6728cf427389e6cb3c8",
	"0x974bfc7fe01143d83776ac14de6142fb04b54cf3ca7de9064a2d31183a255525b89ee6af078a8a6ba07cc49186150266",
	"0x994f8f0599cec69720a9871d8734c6e9f5f36d2045294082a51c40f351c7217c69d0f6f66947cd95f88fe9ec0492068d",
	"0x994fcd4a09c273f0f1d46eb219e15c33e6caa9c93a2c87004339ec67c4808559f9f9aeff9cf7e8eea8f13bb5f3a0c5d5",
	"0x99a9a37bc913168a76701a32c53652a19a1ab96ce1a14a121bfb89565def0be5ac0a45c4538e53ff73e1cbd84f763339",
	"0x99ccbcbf38fb63dea44bdc118848574b238c64a0ea48fb2d9f89280a485f56fc4d5c48ac2c3e3331937c35c2cc2d9661",
	"0x9a64ef3e62b96990305c10b76056f2fcc7a3fb92908bbccd1f769304c1c151a1d7f00a09354252bb2f5324b61845d459",
	"0x9a9cdcd34b18e5771c7feb5374d2cc738cbdf3686fbe1d4bacdb9db7eb692edd50c347b15a2cb2de2034028b6b73f44a",
];
