//! HTTP query-parameter API for remote control of mpv.
//!
//! # Purpose
//!
//! Lets scripts, browsers and home-automation tools drive the player with
//! plain `GET` requests. All routes answer with JSON and status 200.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐                    ┌──────────────┐          ┌──────────┐
//! │   rouille worker thread │  ── router call ─▶ │    Router    │ ── IPC ─▶│   mpv    │
//! │   GET /control?cmd=play │                    │  (stateless) │          │  socket  │
//! └─────────────────────────┘  ◀── Outcome ───── └──────────────┘ ◀─────── └──────────┘
//!          │
//!          ▼
//!   {"ok":true} / {"ok":false,"error":"..."}
//! ```
//!
//! - **rouille** - sync HTTP server, one thread per connection
//! - **Router** - shared behind an `Arc`, no locking of its own
//! - **ready flag** - `AtomicBool` owned by the server, read by `/health`
//!
//! # Endpoints
//!
//! | Method | Path        | Params                   | Description                  |
//! |--------|-------------|--------------------------|------------------------------|
//! | GET    | `/append`   | `url`, `flag`?           | Load a file                  |
//! | GET    | `/playlist` | `url`, `flag`?           | Load a playlist              |
//! | GET    | `/control`  | `cmd`                    | play/pause/pause-cycle/next/prev |
//! | GET    | `/set`      | `name`, `value`          | Set a property               |
//! | GET    | `/get`      | `name`                   | Read a property              |
//! | GET    | `/health`   |                          | Readiness check              |

mod api;

pub use api::{ApiHandle, ApiResponse, ApiServer};
