// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::AsYouTypeFormatter;

/// Byte offset of the code point at `position` in `s`, clamped to its end.
fn convert_unicode_string_position(s: &str, position: usize) -> usize {
    s.char_indices()
        .nth(position)
        .map_or(s.len(), |(offset, _)| offset)
}

impl<'a> AsYouTypeFormatter<'a> {
    /// Returns the byte offset in the last returned output right after the
    /// character passed to [`Self::input_digit_and_remember_position`].
    ///
    /// Separators inserted before that character move the position along,
    /// digits typed after it do not.
    pub fn get_remembered_position(&self) -> usize {
        if !self.able_to_format {
            // The output is the input as typed.
            return convert_unicode_string_position(&self.accrued_input, self.original_position);
        }
        let mut remembered_digits = self
            .accrued_input_without_formatting
            .chars()
            .take(self.position_to_remember)
            .peekable();
        let mut current_output_index = 0;
        for output_char in self.current_output.chars() {
            let Some(&digit) = remembered_digits.peek() else {
                break;
            };
            if digit == output_char {
                remembered_digits.next();
            }
            current_output_index += 1;
        }
        convert_unicode_string_position(&self.current_output, current_output_index)
    }
}

#[cfg(test)]
mod tests {
    use super::convert_unicode_string_position;

    #[test]
    fn positions_are_converted_to_byte_offsets() {
        assert_eq!(0, convert_unicode_string_position("650", 0));
        assert_eq!(2, convert_unicode_string_position("650", 2));
        assert_eq!(3, convert_unicode_string_position("650", 3));
        assert_eq!(3, convert_unicode_string_position("650", 7));
        // Full-width digits take three bytes each.
        assert_eq!(6, convert_unicode_string_position("６５０", 2));
    }
}
