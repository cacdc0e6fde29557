#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod stub_api;

pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use stub_api::{
    spawn_failing_api, spawn_stub_api, spawn_stub_api_with_body, unused_base_url,
};
