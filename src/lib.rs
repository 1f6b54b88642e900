//! 단위 변환 핵심 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 셸에서도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod registry;
pub mod ui_cli;
