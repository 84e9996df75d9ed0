crate::define_id_enum! {
    /// Primary project language
    LanguageId {
        Javascript => "javascript" : "JavaScript",
        Typescript => "typescript" : "TypeScript",
        Python => "python" : "Python",
    }
}

impl Default for LanguageId {
    fn default() -> Self {
        Self::Javascript
    }
}
