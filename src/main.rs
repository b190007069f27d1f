// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Pathwright command line

fn main() -> anyhow::Result<()> {
    pathwright::run()
}
