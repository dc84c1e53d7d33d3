macro_rules! impl_is_as {
    ($enum:ident: $($is_name:ident, $as_name:ident <= $vari:ident ( $v:ident ) -> $ret:ty { $conv:expr },)+) => {
        $(
            impl $enum {
                pub fn $is_name(&self) -> bool {
                    if let $enum :: $vari ( _ ) = self {
                        true
                    } else {
                        false
                    }
                }

                pub fn $as_name(&self) -> Option<$ret> {
                    if let $enum :: $vari ( $v ) = self {
                        Some($conv)
                    } else {
                        None
                    }
                }
            }
        )+
    };
}
