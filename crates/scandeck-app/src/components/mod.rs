// SPDX-License-Identifier: MIT

pub mod action_sheet;
pub mod confirm;
pub mod extracted_text;
pub mod home;
pub mod notice_banner;
pub mod preview;
pub mod saved_docs;
