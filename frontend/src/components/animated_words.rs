use yew::prelude::*;

/// Each word with the delay (ms) at which its entrance animation starts.
pub fn word_delays(text: &str, stagger_ms: u32, delay_ms: u32) -> Vec<(&str, u32)> {
    text.split_whitespace()
        .zip(0u32..)
        .map(|(word, i)| (word, delay_ms + i * stagger_ms))
        .collect()
}

/// Characters of `text`, spaces turned into non-breaking spaces so that
/// inline-block letters keep their gaps.
pub fn letters(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| if c == ' ' { '\u{00A0}' } else { c })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct AnimatedWordsProps {
    pub text: AttrValue,
    #[prop_or(30)]
    pub stagger_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedWords)]
pub fn animated_words(props: &AnimatedWordsProps) -> Html {
    html! {
        <div class={classes!("animated-words", props.class.clone())}>
            { for word_delays(&props.text, props.stagger_ms, props.delay_ms).into_iter().map(|(word, delay)| html! {
                <span class="animated-word" style={format!("animation-delay: {}ms;", delay)}>{word}</span>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedLettersProps {
    pub text: AttrValue,
    #[prop_or(50)]
    pub stagger_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(AnimatedLetters)]
pub fn animated_letters(props: &AnimatedLettersProps) -> Html {
    html! {
        <>
            { for letters(&props.text).into_iter().zip(0u32..).map(|(letter, i)| html! {
                <span
                    class="animated-letter"
                    style={format!("animation-delay: {}ms;", props.delay_ms + i * props.stagger_ms)}
                >
                    {letter.to_string()}
                </span>
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_staggered_after_delay() {
        assert_eq!(
            word_delays("Full Stack Developer", 50, 100),
            vec![("Full", 100), ("Stack", 150), ("Developer", 200)]
        );
    }

    #[test]
    fn extra_whitespace_is_ignored() {
        assert_eq!(word_delays("  a   b ", 10, 0), vec![("a", 0), ("b", 10)]);
        assert!(word_delays("", 10, 0).is_empty());
    }

    #[test]
    fn spaces_become_non_breaking() {
        assert_eq!(letters("Hi yo"), vec!['H', 'i', '\u{00A0}', 'y', 'o']);
    }
}
