//! Parsing of whitespace-separated `name=value` parameter strings.

use crate::error::{CoralError, ParseError};
use crate::param::ParamDescriptor;
use crate::schema::SchemaAggregate;
use crate::value::Value;
use crate::CoralResult;

/// One parsed `name=value` token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedParam<'a> {
    /// Descriptor the name resolved to.
    pub descriptor: &'a ParamDescriptor,
    /// Value parsed for the descriptor's type.
    pub value: Value,
}

/// Parse `params` against `aggregate`.
///
/// Tokens are separated by runs of whitespace. Each must be `name=value`
/// with a non-empty name and value and a single `=`. Names are matched
/// case-sensitively against parameter names. A blank string yields no
/// parameters.
///
/// ```
/// use coral_config::{SchemaAggregate, config_scope, i32_param, parse_params, string_param};
///
/// config_scope! {
///     struct Login {
///         USERNAME: String = string_param(),
///         MAX_RETRIES: i32 = i32_param().with_default(3),
///     }
/// }
///
/// let aggregate = SchemaAggregate::builder().scope::<Login>().build().expect("valid");
/// let parsed = parse_params(&aggregate, "username=saoj maxRetries=2").expect("valid params");
/// assert_eq!(parsed.len(), 2);
/// assert!(parse_params(&aggregate, "retries=2").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] for the first bad token, or an aggregate naming
/// every bad token when there are several.
pub fn parse_params<'a>(
    aggregate: &'a SchemaAggregate,
    params: &str,
) -> CoralResult<Vec<ParsedParam<'a>>> {
    let mut parsed = Vec::new();
    let mut errors = Vec::new();
    for token in params.split_whitespace() {
        match parse_token(aggregate, token) {
            Ok(param) => parsed.push(param),
            Err(err) => errors.push(CoralError::from(err)),
        }
    }
    CoralError::check_all(errors)?;
    Ok(parsed)
}

fn parse_token<'a>(
    aggregate: &'a SchemaAggregate,
    token: &str,
) -> Result<ParsedParam<'a>, ParseError> {
    let malformed = || ParseError::MalformedToken {
        token: token.to_owned(),
    };
    let (name, raw) = token.split_once('=').ok_or_else(malformed)?;
    if name.is_empty() || raw.is_empty() || raw.contains('=') {
        return Err(malformed());
    }
    let descriptor = aggregate
        .find_by_name(name)
        .ok_or_else(|| ParseError::UnknownParameter {
            token: token.to_owned(),
            name: name.to_owned(),
        })?;
    let value = descriptor
        .parse_value(raw)
        .map_err(|source| ParseError::InvalidToken {
            token: token.to_owned(),
            source: Box::new(source),
        })?;
    Ok(ParsedParam { descriptor, value })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::parse_params;
    use crate::error::{CoralError, ParseError};
    use crate::{SchemaAggregate, Value, bool_param, config_scope, i32_param, string_param};

    config_scope! {
        struct Seeds {
            USERNAME: String = string_param(),
            MAX_RETRIES: i32 = i32_param().with_default(3),
            NO_REWIND: bool = bool_param().with_default(true),
        }
    }

    #[fixture]
    fn aggregate() -> SchemaAggregate {
        SchemaAggregate::builder()
            .scope::<Seeds>()
            .build()
            .expect("seed scope is valid")
    }

    #[rstest]
    fn parses_tokens_in_order(aggregate: SchemaAggregate) {
        let parsed = parse_params(&aggregate, "  username=saoj\tmaxRetries=2\n noRewind=FALSE ")
            .expect("valid params");
        let pairs: Vec<_> = parsed
            .iter()
            .map(|p| (p.descriptor.param_name(), p.value.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("username", Value::String("saoj".into())),
                ("maxRetries", Value::I32(2)),
                ("noRewind", Value::Bool(false)),
            ]
        );
    }

    #[rstest]
    #[case::blank("")]
    #[case::whitespace(" \t ")]
    fn blank_input_yields_nothing(aggregate: SchemaAggregate, #[case] input: &str) {
        assert!(parse_params(&aggregate, input).expect("blank is valid").is_empty());
    }

    #[rstest]
    #[case::no_equals("username")]
    #[case::empty_value("username=")]
    #[case::empty_name("=saoj")]
    #[case::two_equals("username=a=b")]
    fn rejects_malformed_tokens(aggregate: SchemaAggregate, #[case] token: &str) {
        let err = parse_params(&aggregate, token).expect_err("malformed");
        assert!(
            matches!(&*err, CoralError::Parse(ParseError::MalformedToken { token: t }) if t == token),
            "{err:?}"
        );
    }

    #[rstest]
    fn name_lookup_is_case_sensitive(aggregate: SchemaAggregate) {
        let err = parse_params(&aggregate, "MaxRetries=2").expect_err("unknown");
        assert!(matches!(
            &*err,
            CoralError::Parse(ParseError::UnknownParameter { token, name })
                if token == "MaxRetries=2" && name == "MaxRetries"
        ));
        assert_eq!(err.to_string(), "unknown parameter 'MaxRetries' in 'MaxRetries=2'");
    }

    #[rstest]
    fn reports_every_bad_token(aggregate: SchemaAggregate) {
        let err = parse_params(&aggregate, "maxRetries=two username=ok bogus=1 noRewind")
            .expect_err("three bad tokens");
        match &*err {
            CoralError::Aggregate(agg) => {
                assert_eq!(agg.len(), 3);
                let first = agg.iter().next().map(ToString::to_string).unwrap_or_default();
                assert!(first.contains("invalid parameter 'maxRetries=two'"), "{first}");
            }
            other => panic!("expected aggregate, got {other:?}"),
        }
    }
}
