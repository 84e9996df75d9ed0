crate::define_id_enum! {
    /// Styling solution identifier
    StylingId {
        Tailwind => "tailwind" : "Tailwind CSS",
        StyledComponents => "styled-components" : "styled-components",
        Emotion => "emotion" : "Emotion",
        Sass => "sass" : "Sass/SCSS",
        Chakra => "chakra" : "Chakra UI",
        Mantine => "mantine" : "Mantine",
        Mui => "mui" : "Material UI",
    }
}
