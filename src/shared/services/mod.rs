// Shared services
// Outbound calls, storage and timers behind small traits so the logic can be
// exercised natively in tests.

pub mod clock;
pub mod http;
pub mod storage;
pub mod github;
pub mod visitor_counter;
pub mod email_relay;
pub mod preferences;
pub mod platform;

pub use clock::Clock;
pub use http::{HttpResponse, HttpTransport};
pub use storage::{KeyValueStore, MemoryStorage};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use github::RepositoryLoader;
pub use visitor_counter::VisitorCounter;
pub use email_relay::{EmailRelay, RelayClient};
pub use preferences::PreferenceStore;
pub use platform::{AppServices, PlatformClock, PlatformHttp, PlatformStorage};
