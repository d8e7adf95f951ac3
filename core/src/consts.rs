/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Name of the HttpOnly cookie carrying the session token.
pub const SESSION_COOKIE: &str = "teamboard_session";

/// Form fields carrying candidate team-member ids share this prefix; the
/// suffix is an arbitrary ordering key chosen by the client.
pub const TEAM_MEMBER_FIELD_PREFIX: &str = "teamMember_";

pub const DISPLAY_NAME_MAX_LEN: usize = 64;
