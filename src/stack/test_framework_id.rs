crate::define_id_enum! {
    /// Test framework identifier
    TestFrameworkId {
        Vitest => "vitest" : "Vitest",
        Jest => "jest" : "Jest",
        Playwright => "playwright" : "Playwright",
        Cypress => "cypress" : "Cypress",
        Mocha => "mocha" : "Mocha",
        Ava => "ava" : "Ava",
    }
}
