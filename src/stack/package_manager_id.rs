crate::define_id_enum! {
    /// Package manager identifier, covering both JavaScript and Python tooling
    PackageManagerId {
        Npm => "npm" : "npm",
        Pnpm => "pnpm" : "pnpm",
        Yarn => "yarn" : "yarn",
        Bun => "bun" : "bun",
        Pip => "pip" : "pip",
        Poetry => "poetry" : "Poetry",
        Pipenv => "pipenv" : "Pipenv",
        Uv => "uv" : "uv",
    }
}

impl Default for PackageManagerId {
    fn default() -> Self {
        Self::Npm
    }
}
